#![deny(missing_docs)]

/*!
Spectone turns the spectral lines of the chemical elements into sound.

Each element's strongest visible line is converted into a frequency, folded down
into the audible range, and snapped to the nearest equal-tempered note. You can use
Spectone as a library or as a command-line app that plays elements as you toggle them.
*/

macro_rules! mods {
    ($($vis:vis $m:ident),*) => ($(mod $m; $vis use $m::*;)*);
}

mod utility;
pub use utility::*;

mods!(
    pub app, pub consts, pub debounce, pub error, pub library, pub player, pub session, pub table
);

pub mod scope;

pub use spectone_core::*;
