#![allow(dead_code)]

pub mod expressions;
