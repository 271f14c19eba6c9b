use std::rc::Rc;

pub mod github;
pub mod projects;

/// Lifecycle of one remote fetch key. The raw list is replaced wholesale on
/// every successful response; there is no incremental merge.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(Rc<T>),
    Error(String),
}
