use std::{cell::RefCell, io::Write};

#[derive(Copy, Clone, Debug)]
pub(crate) enum ErrorCode {
    Write,
    Flush,
}
impl ErrorCode {
    fn as_index(self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Flush => "flush",
        }
    }
}

// Internal problems of the logger can't be logged with the logger itself,
// so they go to stderr, with a pointer to the error code documentation.
pub(crate) fn eprint_err(error_code: ErrorCode, msg: &str, err: &dyn std::error::Error) {
    eprintln!(
        "[fanout_logger][ERRCODE::{error_code:?}] {msg}, caused by {err:?}\n    \
         See https://docs.rs/fanout_logger/latest/fanout_logger/error_info/index.html#{}",
        error_code.as_index()
    );
}

pub(crate) fn io_err(s: &'static str) -> std::io::Error {
    std::io::Error::other(s)
}

// Thread-local buffer
pub(crate) fn buffer_with<F>(f: F)
where
    F: FnOnce(&RefCell<Vec<u8>>),
{
    thread_local! {
        static BUFFER: RefCell<Vec<u8>> = RefCell::new(Vec::with_capacity(200));
    }
    BUFFER.with(f);
}

// Assembles a complete log line in the thread-local buffer and hands it over
// to `emit` in one piece, so that every sink sees the line as a single write.
pub(crate) fn write_buffered<F, E>(fill: F, emit: E) -> std::io::Result<()>
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
    E: FnOnce(&[u8]) -> std::io::Result<()>,
{
    let mut result: std::io::Result<()> = Ok(());

    buffer_with(|tl_buf| match tl_buf.try_borrow_mut() {
        Ok(mut buffer) => {
            // a panic in an earlier fill may have left a partial line behind
            buffer.clear();
            result = fill(&mut *buffer).and_then(|()| emit(buffer.as_slice()));
            buffer.clear();
        }
        Err(_e) => {
            // We arrive here in the rare cases of recursive logging
            // (e.g. log calls in Debug or Display implementations);
            // the inner line is then written before the outer one
            let mut tmp_buf = Vec::<u8>::with_capacity(200);
            result = fill(&mut tmp_buf).and_then(|()| emit(tmp_buf.as_slice()));
        }
    });
    result
}

// Completes a line in the way the printf-style entry point requires:
// a newline is appended only if the message does not already end with one.
pub(crate) fn terminate_line(buffer: &mut Vec<u8>) -> std::io::Result<()> {
    if buffer.last() != Some(&b'\n') {
        buffer.write_all(b"\n")?;
    }
    Ok(())
}
