mod post;
mod user;
