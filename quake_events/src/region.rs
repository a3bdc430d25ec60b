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

//! geographic filtering of events with a (presumably) rectangular region given by its four corners

use std::fmt;
use serde::{Serialize,Deserialize};
use quake_common::warn;
use crate::errors::{Result, QuakeError, config_error};

/// max |cos| between adjacent region edges we still consider to be perpendicular
const ORTHOGONALITY_EPS: f64 = 1e-6;

/// a 2D point with x = latitude and y = longitude (both in degrees)
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64
}

impl Point {
    pub fn new (x: f64, y: f64)->Self { Point{x,y} }

    pub fn from_lat_lon (lat: f64, lon: f64)->Self { Point{ x: lat, y: lon } }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[derive(Debug,Clone,Copy,PartialEq)]
struct Vector {
    x: f64,
    y: f64
}

impl Vector {
    fn between (p1: &Point, p2: &Point)->Self {
        Vector { x: p2.x - p1.x, y: p2.y - p1.y }
    }

    fn dot (&self, other: &Vector)->f64 {
        self.x * other.x + self.y * other.y
    }

    fn length_squared (&self)->f64 { self.dot(self) }
}

/// a quadrilateral region defined by its named corners, which are assumed to form a rectangle.
/// Use `Region::new(..)` to get degenerate corner sets rejected. Deserialized regions should be checked
/// with `validate()` before use
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Region {
    pub nw: Point,
    pub ne: Point,
    pub sw: Point,
    pub se: Point
}

impl Region {
    pub fn new (nw: Point, ne: Point, sw: Point, se: Point)->Result<Self> {
        let region = Region { nw, ne, sw, se };
        region.validate()?;
        Ok(region)
    }

    /// reject regions with zero length edges since those would only contain points that coincide with an edge.
    /// Non-perpendicular edges or a SW corner that does not close the rectangle are reported but accepted -
    /// containment is only approximate for such regions
    pub fn validate (&self)->Result<()> {
        let ab = Vector::between( &self.nw, &self.ne);
        let bc = Vector::between( &self.ne, &self.se);
        let (ab_len2, bc_len2) = (ab.length_squared(), bc.length_squared());

        if !ab_len2.is_finite() || !bc_len2.is_finite() {
            return Err( config_error!("region with non-finite corner coordinates {}", self))
        }
        if ab_len2 == 0.0 {
            return Err( config_error!("degenerate region: NW {} and NE {} corners coincide", self.nw, self.ne))
        }
        if bc_len2 == 0.0 {
            return Err( config_error!("degenerate region: NE {} and SE {} corners coincide", self.ne, self.se))
        }

        let cos = ab.dot(&bc) / (ab_len2 * bc_len2).sqrt();
        if cos.abs() > ORTHOGONALITY_EPS {
            warn!("region edges are not perpendicular (cos(NE)={cos:.6}), containment test is approximate");
        }

        let sw = Point::new( self.nw.x + bc.x, self.nw.y + bc.y);
        if Vector::between( &sw, &self.sw).length_squared() > ORTHOGONALITY_EPS * (ab_len2 + bc_len2) {
            warn!("SW corner {} does not close region rectangle (expected {})", self.sw, sw);
        }

        Ok(())
    }

    /// closed projection test: with A=NW, B=NE, C=SE and point M the point is inside iff
    /// `0 <= AB·AM <= AB·AB` and `0 <= BC·BM <= BC·BC`. Points on the boundary are inside.
    /// Note that BC has to be an edge - projecting onto the NE->SW diagonal would also accept points
    /// north-west and south-east of the rectangle
    pub fn contains (&self, p: &Point)->bool {
        let ab = Vector::between( &self.nw, &self.ne);
        let am = Vector::between( &self.nw, p);
        let bc = Vector::between( &self.ne, &self.se);
        let bm = Vector::between( &self.ne, p);

        let ab_am = ab.dot(&am);
        let bc_bm = bc.dot(&bm);

        0.0 <= ab_am && ab_am <= ab.length_squared() && 0.0 <= bc_bm && bc_bm <= bc.length_squared()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[NW{} NE{} SW{} SE{}]", self.nw, self.ne, self.sw, self.se)
    }
}

/// something that has a geographic position
pub trait Located {
    fn position (&self)->Point;
}

/// split items into the ones inside of region (in input order) and the number of excluded ones
pub fn filter_region<'a,T: Located> (items: &'a [T], region: &Region)->(Vec<&'a T>,usize) {
    let mut included: Vec<&'a T> = Vec::with_capacity(items.len());
    let mut n_excluded = 0;

    for item in items {
        if region.contains( &item.position()) {
            included.push(item);
        } else {
            n_excluded += 1;
        }
    }

    (included, n_excluded)
}
