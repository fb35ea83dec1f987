pub mod blit;
