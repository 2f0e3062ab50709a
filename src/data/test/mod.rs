mod loading;
mod user;
