//! Stock dispatcher: symlink it as `<name>` and it dispatches to `<name>-*`.

use argpoints::{Dispatcher, ExecutionContext};

fn main() {
    let ctx = ExecutionContext::capture();
    match Dispatcher::from_invocation(&ctx) {
        Ok(dispatcher) => dispatcher.version(env!("CARGO_PKG_VERSION")).main(),
        Err(e) => {
            e.report();
            std::process::exit(e.exit_code());
        }
    }
}
