//! Propagates a failed outcome through `?` into a boxed error.

use std::error::Error;

use outcome::{Failure, Outcome, RaisedFault};

fn lookup(id: u32) -> Outcome<String> {
    if id == 0 {
        Outcome::nested("lookup", Failure::simple("unknown id"))
    } else {
        Outcome::ok(format!("client-{id}"))
    }
}

fn handler(id: u32) -> Result<String, Box<dyn Error + Send + Sync>> {
    let name = lookup(id).or_else_propagate()?;
    Ok(name)
}

fn main() {
    assert_eq!(handler(7).ok().as_deref(), Some("client-7"));
    let err = handler(0).err();
    let fault = err.as_deref().and_then(|e| e.downcast_ref::<RaisedFault>());
    assert_eq!(fault.map(RaisedFault::message), Some("lookup"));
}
