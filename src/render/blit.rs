use image::RgbaImage;

/// Source-over for straight-alpha RGBA8 pixels.
///
/// An opaque source replaces the destination exactly and a fully transparent source leaves it
/// untouched, so opaque layers composite bit-exactly.
pub fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let sa = u32::from(src[3]);
    let da = u32::from(mul_div255(u16::from(dst[3]), 255 - src[3] as u16));
    let out_a = sa + da;

    let mut out = [0u8; 4];
    out[3] = out_a as u8;
    for i in 0..3 {
        let c = u32::from(src[i]) * sa + u32::from(dst[i]) * da;
        out[i] = ((c + out_a / 2) / out_a) as u8;
    }
    out
}

/// Draw `src` onto `dst` with its top-left corner at `(x, y)` in `dst` pixel space.
///
/// Pixels falling outside `dst` are clipped; any offset is accepted.
pub fn blit_over(dst: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    let (sw, sh) = (i64::from(src.width()), i64::from(src.height()));

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + sw).min(dw);
    let y1 = (y + sh).min(dh);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for dy in y0..y1 {
        let sy = (dy - y) as u32;
        for dx in x0..x1 {
            let sx = (dx - x) as u32;
            let s = src.get_pixel(sx, sy).0;
            let d = dst.get_pixel_mut(dx as u32, dy as u32);
            d.0 = over(d.0, s);
        }
    }
}

/// Multiply color channels by alpha, rounding to nearest.
pub fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = mul_div255(px[0] as u16, a);
        px[1] = mul_div255(px[1] as u16, a);
        px[2] = mul_div255(px[2] as u16, a);
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/blit.rs"]
mod tests;
