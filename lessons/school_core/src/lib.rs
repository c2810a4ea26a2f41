//! School Core - plumbing shared by the OnlineSchool lessons.
//!
//! Every lesson writes its demonstration lines through a [`PrintHandlerImpl`]
//! so the same code can print to stdout, capture into a buffer for tests, or
//! stay silent. Lesson types also report how they behave on assignment through
//! [`Categorized`].

mod print_handler;
mod value_category;

pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value_category::{Categorized, ValueCategory};
