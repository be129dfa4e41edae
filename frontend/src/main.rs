use app::App;

mod api;
mod app;
mod compose;
mod config;
mod controller;
mod error;
mod list;
mod state;
mod types;
mod view;

fn main() {
    yew::Renderer::<App>::new().render();
}
