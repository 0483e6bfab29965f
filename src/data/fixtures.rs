//! Small penguin sample shared by the unit tests.
//!
//! Island means for body mass: Dream 3625, Torgersen 3775, Biscoe 4558.33.
//! Gentoo only lives on Biscoe; every Chinstrap is female.

use super::loader::parse_csv;
use super::model::Dataset;

pub const SAMPLE_CSV: &str = "\
species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex
Adelie,Torgersen,39.1,18.7,181,3750,MALE
Adelie,Torgersen,39.5,17.4,186,3800,FEMALE
Adelie,Torgersen,,,,,
Adelie,Torgersen,34.1,18.1,193,3475,
Adelie,Biscoe,37.8,18.3,174,3400,FEMALE
Adelie,Biscoe,37.7,18.7,180,3600,MALE
Adelie,Dream,39.5,16.7,178,3250,FEMALE
Adelie,Dream,37.2,18.1,178,3900,MALE
Chinstrap,Dream,46.5,17.9,192,3500,FEMALE
Chinstrap,Dream,45.4,18.7,188,3525,FEMALE
Chinstrap,Dream,45.2,17.8,198,3950,FEMALE
Gentoo,Biscoe,46.1,13.2,211,4500,FEMALE
Gentoo,Biscoe,50.0,16.3,230,5700,MALE
Gentoo,Biscoe,48.7,14.1,210,4450,FEMALE
Gentoo,Biscoe,NA,NA,NA,NA,NA
Gentoo,Biscoe,50.0,15.2,218,5700,MALE
";

pub fn sample_dataset() -> Dataset {
    parse_csv(SAMPLE_CSV.as_bytes()).expect("fixture parses")
}
