//! Types shared between the browser page and the gateway:
//! endpoint constants, request/response DTOs and the submission state machine.

pub mod usecases;
