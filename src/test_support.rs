use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::runner::Session;

/// In-memory console shared between a `Session` and the test inspecting it.
#[derive(Clone, Default)]
pub struct Capture(Rc<RefCell<Vec<u8>>>);

impl Capture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A session writing into a fresh capture buffer.
pub fn captured_session() -> (Session, Capture) {
    let capture = Capture::default();
    (Session::new(Box::new(capture.clone())), capture)
}
