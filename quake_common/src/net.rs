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

//! common utility functions for network operations

use std::{io::Write, path::Path, time::Duration};
use reqwest::{Client, RequestBuilder, Response};
use tempfile::NamedTempFile;

use crate::define_error;

define_error!{ pub NetError = 
    IOError(#[from] std::io::Error) : "IO error: {0}",
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    HttpStatus(String,u16) : "request {0} failed with response status {1}"
}

pub type Result<T> = std::result::Result<T, NetError>;

fn get_request (client: &Client, url: &str, timeout: Option<Duration>)->RequestBuilder {
    let req = client.get(url);
    if let Some(timeout) = timeout { req.timeout(timeout) } else { req }
}

/// any non-2xx status is an error - we do not try to interpret error bodies
fn check_status (url: &str, response: Response)->Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err( NetError::HttpStatus( url.to_string(), status.as_u16()))
    }
}

/// fetch content from URL using HTTP GET method and store it in the file at `path`. Retrieve in chunks
/// to support large files. Content is written to a temp file in the same directory first, i.e. `path` only
/// appears if the download succeeded. Returns the number of bytes written
pub async fn download_url (client: &Client, url: &str, timeout: Option<Duration>, path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new(".")
    };

    let response = get_request( client, url, timeout).send().await?;
    let mut response = check_status( url, response)?;

    let mut file = NamedTempFile::new_in(dir)?;
    let mut len: u64 = 0;
    while let Some(chunk) = response.chunk().await? {
        len += chunk.len() as u64;
        file.write_all(&chunk)?;
    }
    file.flush()?;
    file.persist(path).map_err( |e| NetError::IOError(e.error))?;

    Ok(len)
}
