// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised before any content is read.
///
/// Problems within a file are no errors. The OpenAir parser reports them as
/// [`openair::Diagnostic`] next to the airspaces it could read.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    FileNotFound(PathBuf),
    UnsupportedFileExtension(PathBuf),
    InvalidCoordinate(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::FileNotFound(path) => write!(f, "file {} not found", path.display()),
            Self::UnsupportedFileExtension(path) => {
                write!(f, "file {} has an unsupported extension", path.display())
            }
            Self::InvalidCoordinate(s) => write!(f, "\"{s}\" is no coordinate"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
