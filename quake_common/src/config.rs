/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! lookup and deserialization of RON config files
//! Config files are searched in this order:
//!   - the filename as given (absolute or relative to the current dir)
//!   - `$QUAKE_CONFIG_DIR/<filename>`
//!   - `./configs/<filename>`
//!   - `<crate-dir>/configs/<filename>` of the crate that invoked `define_load_config!{}`

use std::{env, path::{Path,PathBuf}};
use serde::de::DeserializeOwned;

use crate::{define_error, fs::filepath_contents_as_string};

pub const CONFIG_DIR_ENV: &str = "QUAKE_CONFIG_DIR";
pub const CONFIGS: &str = "configs";

define_error!{ pub ConfigError =
    IOError(#[from] std::io::Error) : "IO error: {0}",
    RonError(#[from] ron::error::SpannedError) : "RON error: {0}",
    NotFound(String) : "config file not found: {0}"
}

pub type Result<T> = std::result::Result<T,ConfigError>;

pub fn find_config_file (crate_dir: &str, filename: &str) -> Option<PathBuf> {
    let path = Path::new(filename);
    if path.is_file() { 
        return Some(path.to_path_buf()) 
    }

    if path.is_relative() {
        let mut candidates: Vec<PathBuf> = Vec::with_capacity(3);
        if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
            candidates.push( Path::new(&dir).join(filename));
        }
        candidates.push( Path::new(CONFIGS).join(filename));
        candidates.push( Path::new(crate_dir).join(CONFIGS).join(filename));

        candidates.into_iter().find( |p| p.is_file())
    } else {
        None
    }
}

pub fn load_config_from_path<C,P> (path: &P) -> Result<C> where C: DeserializeOwned, P: AsRef<Path> {
    let input = filepath_contents_as_string(path)?;
    Ok( ron::from_str(&input)? )
}

pub fn load_config<C> (crate_dir: &str, filename: &str) -> Result<C> where C: DeserializeOwned {
    if let Some(path) = find_config_file( crate_dir, filename) {
        load_config_from_path( &path)
    } else {
        Err( ConfigError::NotFound( filename.to_string()))
    }
}

/// define `load_config(filename)` and `load_config_or_default(filename)` functions in the invoking crate,
/// which use the crate dir of the caller as the last lookup option
#[macro_export]
macro_rules! define_load_config {
    () => {
        /// load RON config with given filename (see `quake_common::config` for lookup rules)
        pub fn load_config<C> (filename: &str) -> $crate::config::Result<C> where C: serde::de::DeserializeOwned {
            $crate::config::load_config( env!("CARGO_MANIFEST_DIR"), filename)
        }

        /// load RON config but fall back to the `Default` value if there is no such file. Other errors 
        /// (e.g. a malformed config) are still reported 
        pub fn load_config_or_default<C> (filename: &str) -> $crate::config::Result<C> where C: serde::de::DeserializeOwned + Default {
            match load_config( filename) {
                Err($crate::config::ConfigError::NotFound(f)) => {
                    $crate::warn!("config {} not found, using defaults", f);
                    Ok( C::default() )
                }
                other => other
            }
        }
    }
}
