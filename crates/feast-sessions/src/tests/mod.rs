mod helpers;
mod tokens;
