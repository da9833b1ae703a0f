mod events;
mod helpers;
