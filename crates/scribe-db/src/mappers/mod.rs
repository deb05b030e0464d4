//! Model → entity mappers

mod comment;
mod follow;
mod group;
mod post;
mod user;
