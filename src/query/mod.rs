pub mod codec;
pub mod debounce;
pub mod location;
pub mod store;
