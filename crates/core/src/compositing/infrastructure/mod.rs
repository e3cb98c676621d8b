pub mod nearest_mask_compositor;
