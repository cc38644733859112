//! # Land Model
//!
//! Value types describing a single land plot as entered by a surveyor, and the
//! figures derived from it.
//!
//! Two traditional unit systems are in use:
//! * **Ropani** (hill districts): Ropani, Ana, Paisa, Dam.
//! * **Bigha** (Terai districts): Bigha, Kattha, Dhur.

pub mod measurement;
pub mod traditional;
pub mod units;
pub mod valuation;
