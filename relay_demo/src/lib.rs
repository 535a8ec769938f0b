use uuid::{uuid, Uuid};

pub mod contact;

pub const UUID1: Uuid = uuid!("0192d4a0-6f3e-7c1a-9d2b-5e8f4a3c2b1d");
pub const UUID2: Uuid = uuid!("0192d4a0-7a11-7e42-8c55-1f0e9d8c7b6a");

pub const HTML_BODY: &str = "<p>Hello, this is a test message.</p>";
