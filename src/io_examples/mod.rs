/// Domain layer - I/O styles, payloads, encodings and the pure services around them
pub mod domain;
pub mod services;
