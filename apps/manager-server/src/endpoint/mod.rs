pub mod misc;

pub mod credential;
pub mod operation;
pub mod participant;
pub mod tenant;
