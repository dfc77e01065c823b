//! SerotoninAI Molecules - presentation-side chemistry helpers.
//!
//! Everything here is a pure function of properties the backend already
//! computed:
//! 1. Drug-likeness rule panels (Lipinski Rule of Five, Rule of Three)
//! 2. A placeholder 2D structure sketch derived from the SMILES string

pub mod druglikeness;
pub mod structure;
