pub mod approvals;
pub mod column_selector;
pub mod preview;
pub mod shared;
pub mod table_selector;
pub mod user_inputs;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}
