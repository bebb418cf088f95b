/// Identifier of errors produced by wrapping a foreign error in `chain_err_message`.
pub const ERR_ID_BASE_ERROR: &str = "base-error";
/// Identifier reported by `prepare_error_to_send` for foreign errors.
pub const ERR_ID_UNKNOWN_ERROR: &str = "unknown-error";

const STACK_HEADER: &str = "stack backtrace:";
const STACK_CAPTURE_POINT: &str = "capture_stack";
/// Frames between the capture point and the caller: `BaseError::new` and the
/// public constructor or `chain_err_message`. Keep in sync with that call chain.
const STACK_SKIP_FRAMES: usize = 2;

/// Structured data carried by every coded error.
#[derive(Debug)]
pub struct ErrorAttributes {
    pub id: &'static str,
    pub stack: String,
    pub msg: String,
    pub http_code: u16,
    pub original_error: Option<Box<Error>>,
    pub default_hint: String,
}

/// Capability shared by every generated error type.
pub trait CodedError: StdError + Send + Sync + 'static {
    fn base(&self) -> &BaseError;

    fn base_mut(&mut self) -> &mut BaseError;

    fn into_base(self: Box<Self>) -> BaseError;

    fn attributes(&self) -> &ErrorAttributes {
        &self.base().attrs
    }

    /// Explanation meant for the client. Types override this to mention
    /// their payload.
    fn hint(&self) -> String {
        self.base().hint()
    }

    /// Prepends context to the message: `msg: <existing message>`.
    fn chain_err_message(&mut self, msg: &str) {
        self.base_mut().chain_err_message(msg);
    }
}

/// Attribute storage embedded by every generated error type.
#[derive(Debug)]
pub struct BaseError {
    pub attrs: ErrorAttributes,
}

impl BaseError {
    #[inline(never)]
    pub fn new(id: &'static str, http_code: u16, msg: &str, err: Option<Error>) -> Self {
        let msg = new_error_message(msg, err.as_ref());
        Self {
            attrs: ErrorAttributes {
                id,
                stack: capture_stack(),
                msg,
                http_code,
                original_error: err.map(Box::new),
                default_hint: status_text(http_code).to_string(),
            },
        }
    }

    pub fn hint(&self) -> String {
        self.attrs.default_hint.clone()
    }

    pub fn chain_err_message(&mut self, msg: &str) {
        self.attrs.msg = format!("{}: {}", msg, self.attrs.msg);
    }
}

impl fmt::Display for BaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.attrs.msg)
    }
}

impl StdError for BaseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.attrs.original_error {
            Some(err) => Some(err.as_ref()),
            None => None,
        }
    }
}

impl CodedError for BaseError {
    fn base(&self) -> &BaseError {
        self
    }

    fn base_mut(&mut self) -> &mut BaseError {
        self
    }

    fn into_base(self: Box<Self>) -> BaseError {
        *self
    }
}

/// Any error a handler may return: one of the coded errors of this module,
/// or a foreign error that does not carry attributes.
#[derive(Debug)]
pub enum Error {
    Coded(Box<dyn CodedError>),
    Other(Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub fn other(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Error::Other(err.into())
    }

    /// Returns the coded view of this error, if it has one.
    pub fn as_coded(&self) -> Option<&dyn CodedError> {
        match self {
            Error::Coded(err) => Some(err.as_ref()),
            Error::Other(_) => None,
        }
    }

    pub fn as_coded_mut(&mut self) -> Option<&mut dyn CodedError> {
        match self {
            Error::Coded(err) => Some(err.as_mut()),
            Error::Other(_) => None,
        }
    }

    /// Returns the concrete error, giving access to its payload.
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        match self {
            Error::Coded(err) => {
                let err: &(dyn StdError + 'static) = &**err;
                err.downcast_ref::<T>()
            }
            Error::Other(err) => err.downcast_ref::<T>(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Coded(err) => fmt::Display::fmt(err, f),
            Error::Other(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Coded(err) => err.source(),
            Error::Other(err) => err.source(),
        }
    }
}

impl<E: CodedError> From<E> for Error {
    fn from(err: E) -> Self {
        Error::Coded(Box::new(err))
    }
}

/// Adds context to any error. Coded errors keep their identity and only
/// get the message prefixed. Foreign errors are wrapped into a `BaseError`.
pub fn chain_err_message(err: Error, msg: &str) -> Error {
    match err {
        Error::Coded(mut err) => {
            err.chain_err_message(msg);
            Error::Coded(err)
        }
        Error::Other(_) => {
            let status = http::StatusCode::INTERNAL_SERVER_ERROR.as_u16();
            Error::Coded(Box::new(BaseError::new(ERR_ID_BASE_ERROR, status, msg, Some(err))))
        }
    }
}

/// What gets reported to a client for an error.
#[derive(Debug)]
pub struct ErrorData {
    pub attrs: ErrorAttributes,
    pub hint: String,
}

/// Reduces any error to attributes and a hint.
pub fn prepare_error_to_send(err: Error) -> ErrorData {
    match err {
        Error::Coded(err) => {
            let hint = err.hint();
            ErrorData {
                attrs: err.into_base().attrs,
                hint,
            }
        }
        Error::Other(err) => {
            let http_code = http::StatusCode::INTERNAL_SERVER_ERROR.as_u16();
            let hint = status_text(http_code).to_string();
            ErrorData {
                attrs: ErrorAttributes {
                    id: ERR_ID_UNKNOWN_ERROR,
                    stack: String::new(),
                    msg: err.to_string(),
                    http_code,
                    original_error: Some(Box::new(Error::Other(err))),
                    default_hint: hint.clone(),
                },
                hint,
            }
        }
    }
}

/// Canonical reason phrase of an HTTP status code, empty when unknown.
pub fn status_text(http_code: u16) -> &'static str {
    match http::StatusCode::from_u16(http_code) {
        Ok(status) => status.canonical_reason().unwrap_or(""),
        Err(_) => "",
    }
}

fn new_error_message(msg: &str, err: Option<&Error>) -> String {
    match err {
        Some(err) => format!("{}: {}", msg, err),
        None => msg.to_string(),
    }
}

#[inline(never)]
fn capture_stack() -> String {
    let trace = Backtrace::force_capture().to_string();
    trim_stack(&trace)
}

fn trim_stack(trace: &str) -> String {
    let mut frames: Vec<Vec<&str>> = Vec::new();
    for line in trace.lines() {
        if is_frame_start(line) || frames.is_empty() {
            frames.push(vec![line]);
        } else if let Some(frame) = frames.last_mut() {
            frame.push(line);
        }
    }

    let start = match frames.iter().position(|frame| frame[0].contains(STACK_CAPTURE_POINT)) {
        Some(index) => (index + 1 + STACK_SKIP_FRAMES).min(frames.len()),
        None => 0,
    };

    let mut lines = vec![STACK_HEADER];
    for frame in &frames[start..] {
        lines.extend(frame.iter().copied());
    }
    lines.join("\n")
}

fn is_frame_start(line: &str) -> bool {
    let line = line.trim_start();
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && line[digits..].starts_with(':')
}
