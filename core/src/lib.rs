#![warn(missing_docs)]

/*!
This crate holds the pure part of Spectone: the conversion of spectral line wavelengths
into audible notes, the element catalog, and the settings types read from Spectone config files.

Nothing in here touches audio devices or the terminal, so every function can be called from any thread.

```
let conversion = spectone_core::convert(656.28).unwrap();
assert_eq!(conversion.note.to_string(), "F4");
assert!((conversion.quantized_frequency - 415.30).abs() < 1e-2);
```
*/

mod convert;
pub mod default;
mod element;
mod error;
mod note;
mod parts;
pub use convert::*;
pub use element::*;
pub use error::*;
pub use note::*;
pub use parts::*;
