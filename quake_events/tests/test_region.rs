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

use quake_events::{Point, Region, Located, filter_region, QuakeError};

fn portugal ()->Region {
    Region::new(
        Point::new( 42.3, -10.3), Point::new( 42.3, -6.3),
        Point::new( 36.3, -10.3), Point::new( 36.3, -6.3)
    ).unwrap()
}

#[test]
fn test_inside_outside() {
    let region = portugal();

    assert!( region.contains( &Point::new( 38.7, -9.1))); // Lisbon
    assert!( !region.contains( &Point::new( 40.4, -3.7))); // Madrid
    assert!( !region.contains( &Point::new( 43.0, -8.0))); // north of region
    assert!( !region.contains( &Point::new( 35.0, -8.0))); // south of region
    assert!( !region.contains( &Point::new( 38.0, -11.0))); // west of region
}

#[test]
fn test_boundary_is_inside() {
    let region = portugal();

    for p in [ Point::new( 42.3, -10.3), Point::new( 36.3, -6.3), Point::new( 42.3, -8.0), Point::new( 38.0, -6.3) ] {
        assert!( region.contains( &p), "boundary point {p} not inside");
    }
}

#[test]
fn test_corners_outside_diagonal() {
    // points that project onto the NW->NE edge and the NE->SW diagonal but are not in the rectangle
    let region = portugal();
    assert!( !region.contains( &Point::new( 42.5, -10.0)));
    assert!( !region.contains( &Point::new( 36.1, -6.5)));
}

#[test]
fn test_degenerate_region() {
    let p = Point::new( 40.0, -8.0);
    let res = Region::new( p, p, p, p);
    println!("{res:?}");
    assert!( matches!( res, Err(QuakeError::ConfigError(_))));

    let res = Region::new( Point::new( 42.3, -10.3), Point::new( 42.3, -6.3), Point::new( 42.3, -10.3), Point::new( 42.3, -6.3));
    assert!( matches!( res, Err(QuakeError::ConfigError(_))));
}

struct Station { lat: f64, lon: f64 }

impl Located for Station {
    fn position (&self)->Point { Point::from_lat_lon( self.lat, self.lon) }
}

#[test]
fn test_filter_region() {
    let items = vec![
        Station { lat: 38.7, lon: -9.1 },
        Station { lat: 40.4, lon: -3.7 },
        Station { lat: 41.1, lon: -8.6 },
        Station { lat: 28.1, lon: -15.4 },
    ];

    let (inside, n_excluded) = filter_region( &items, &portugal());
    assert_eq!( inside.len(), 2);
    assert_eq!( n_excluded, 2);
    assert_eq!( inside[0].lat, 38.7);
    assert_eq!( inside[1].lat, 41.1);
}

#[test]
fn test_integer_corner_region() {
    let region = Region::new(
        Point::new( 42.0, -10.3), Point::new( 42.0, -6.3),
        Point::new( 36.0, -10.3), Point::new( 36.0, -6.3)
    ).unwrap();

    assert!( region.contains( &Point::new( 39.0, -8.0)));
    assert!( !region.contains( &Point::new( 39.0, -20.0)));
}
