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

use crate::bucket::Bucket;

/// express each value as a percentage of the max value.
/// If the max is not positive (no data, all zero) all percentages are 0 - we never divide by zero
pub fn percent_of_max (values: &[f64])->Vec<f64> {
    let max = values.iter().copied().fold( 0.0, f64::max);

    if max > 0.0 {
        values.iter().map( |v| v / max * 100.0).collect()
    } else {
        vec![0.0; values.len()]
    }
}

/// the normalized (0..100) chart data of a bucket sequence
#[derive(Debug,Clone,PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub counts: Vec<f64>,
    pub magnitudes: Vec<f64>,
    pub depths: Vec<f64>,
}

impl ChartSeries {
    pub fn from_buckets<T> (buckets: &[Bucket<T>])->Self {
        let labels = buckets.iter().map( |b| b.index.to_string()).collect();
        let counts: Vec<f64> = buckets.iter().map( |b| b.count as f64).collect();
        let magnitudes: Vec<f64> = buckets.iter().map( |b| b.max_magnitude).collect();
        let depths: Vec<f64> = buckets.iter().map( |b| b.max_depth).collect();

        ChartSeries {
            labels,
            counts: percent_of_max( &counts),
            magnitudes: percent_of_max( &magnitudes),
            depths: percent_of_max( &depths)
        }
    }

    pub fn len (&self)->usize { self.labels.len() }

    pub fn is_empty (&self)->bool { self.labels.is_empty() }
}
