pub mod local_image_store;
