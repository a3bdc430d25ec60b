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

#![allow(unused_macros)]

#[macro_export]
macro_rules! io_error {
    ( $kind:expr, $fmt:literal $(, $($arg:expr),* )? ) =>
    {
        std::io::Error::new( $kind, format!($fmt, $( $($arg),* )?))
    }
}
pub use io_error;

/// syntactic sugar macro to define thiserror Error enums:
/// ```ignore
/// define_error!{ pub NetError = 
///   IOError( #[from] std::io::Error ) : "IO error: {0}",
///   OpFailed(String) : "operation failed: {0}"
/// }
/// ```
/// will get expanded into
/// ```ignore
/// #[derive(thiserror::Error,Debug)]
/// pub enum NetError {
///     #[error("IO error: {0}")]
///     IOError(#[from] std::io::Error),
/// 
///     #[error("operation failed: {0}")]
///     OpFailed(String),
/// }
/// ```
/// Note the using crate needs its own `thiserror` dependency since the derive macro expands into `::thiserror` paths
#[macro_export]
macro_rules! define_error {
    ($vis:vis $name:ident = $( $err_variant:ident ( $( $( #[$meta:meta] )? $field_type:ty),* ) : $msg_lit:literal ),*) => {
        #[derive(thiserror::Error,Debug)]
        $vis enum $name {
            $( 
                #[error($msg_lit)]
                $err_variant ( $( $(#[$meta])? $field_type ),*  )
            ),*
        }
    }
}
pub use define_error;

/*
 * we intercept logging/tracing macros here to have a central place where we can remove/replace them 
 */

#[macro_export]
macro_rules! trace {
    ( $($arg:tt)* ) => { $crate::tracing::trace!( $($arg)* ) }
}

#[macro_export]
macro_rules! debug {
    ( $($arg:tt)* ) => { $crate::tracing::debug!( $($arg)* ) }
}

#[macro_export]
macro_rules! info {
    ( $($arg:tt)* ) => { $crate::tracing::info!( $($arg)* ) }
}

#[macro_export]
macro_rules! warn {
    ( $($arg:tt)* ) => { $crate::tracing::warn!( $($arg)* ) }
}

#[macro_export]
macro_rules! error {
    ( $($arg:tt)* ) => { $crate::tracing::error!( $($arg)* ) }
}
