#![doc = "Binary for building wasm files from odra contracts."]
#![no_std]
#![no_main]
#![allow(unused_imports, clippy::single_component_path_imports)]
use fund_me_contracts;
