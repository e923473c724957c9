//! Generated protobuf types.

#![allow(clippy::pedantic, clippy::all)]

/// `user` package: the user directory service.
pub mod user {
    tonic::include_proto!("user");
}

/// `grpc.health.v1` package: the standard health checking protocol.
pub mod health {
    tonic::include_proto!("grpc.health.v1");
}
