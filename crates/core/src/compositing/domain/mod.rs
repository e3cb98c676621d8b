pub mod mask_compositor;
