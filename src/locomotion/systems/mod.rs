//! Locomotion domain: system modules for the per-tick update.

pub(crate) mod drive;
pub(crate) mod input;
pub(crate) mod probes;

pub(crate) use drive::drive_locomotion;
pub(crate) use input::sample_input;
pub(crate) use probes::probe_contacts;
