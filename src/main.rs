mod constants;
mod engine;

use engine::core::app_setup::create_app;

fn main() {
    create_app().run();
}
