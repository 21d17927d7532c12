//! Common traits and types that are useful for working with `rectmsh`
#![allow(unused_imports)]

pub use crate::data::RectMesh;
pub use crate::domain::{Rectangle, Resolution};
pub use crate::mesh::{Connectivity, Element, Grid, Point, Side};
pub use crate::traits::Section;

pub(crate) use crate::parse::ParseError;
pub(crate) use crate::Error;
pub(crate) use std::io::{BufRead, Write};

pub(crate) use crate::{mesh, parse, utils, write_msh};

pub(crate) use derive_more::{Constructor, Deref, Display, From};

pub(crate) use ndarray::Array1;
