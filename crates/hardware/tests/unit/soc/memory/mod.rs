/// Window buffer bounds and byte order.
pub mod buffer;
