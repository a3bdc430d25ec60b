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

use std::{fs, path::Path};
use regex::Regex;
use serde::Deserialize;
use quake_common::{config::{self, ConfigError}, fs::*};

// run with "cargo test test_xx -- --nocapture"

#[test]
fn test_matching_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write( dir.path().join("b.csv"), b"b").unwrap();
    fs::write( dir.path().join("a.csv"), b"a").unwrap();
    fs::write( dir.path().join("notes.txt"), b"-").unwrap();

    let re = Regex::new( r".*\.csv$").unwrap();
    let files = matching_files_in_dir( &dir.path(), &re).unwrap();
    for f in &files {
        println!("{f:?}");
    }

    assert_eq!( files.len(), 2);
    assert_eq!( filename( &files[0]), Some("a.csv"));
    assert_eq!( filename( &files[1]), Some("b.csv"));
    assert_eq!( filepath_contents_as_string( &files[1]).unwrap(), "b");
}

#[test]
fn test_missing_dir() {
    let re = Regex::new( r".*").unwrap();
    let files = matching_files_in_dir( &Path::new("does/not/exist"), &re).unwrap();
    assert!( files.is_empty());
}

#[test]
fn test_ensure_writable_dir() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("out").join("data");
    ensure_writable_dir( &sub).unwrap();
    assert!( sub.is_dir());
    ensure_writable_dir( &sub).unwrap(); // idempotent
}

#[derive(Deserialize,Debug,PartialEq)]
struct TestConfig {
    name: String,
    hours: u32
}

#[test]
fn test_load_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.ron");
    fs::write( &path, br#"TestConfig( name: "weekly", hours: 168 )"#).unwrap();
    let path_str = path.to_str().unwrap();

    let conf: TestConfig = config::load_config( env!("CARGO_MANIFEST_DIR"), path_str).unwrap();
    assert_eq!( conf, TestConfig { name: "weekly".to_string(), hours: 168 });

    let res: config::Result<TestConfig> = config::load_config( env!("CARGO_MANIFEST_DIR"), "no_such_config.ron");
    assert!( matches!( res, Err(ConfigError::NotFound(_))));

    let bad = dir.path().join("bad.ron");
    fs::write( &bad, b"TestConfig( name: 42 )").unwrap();
    let res: config::Result<TestConfig> = config::load_config_from_path( &bad);
    assert!( matches!( res, Err(ConfigError::RonError(_))));
}
