mod admin_blog;
mod blog;
mod health_check;
mod openapi;
