// Wire descriptors for the certificate authority service (proto-JSON form)

pub mod operation;
pub mod requests;
pub mod resources;

pub use operation::{Operation, Status};
pub use requests::*;
pub use resources::*;
