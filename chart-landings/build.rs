use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("landings.csv");

    // Copy landings.csv to OUT_DIR for include_str
    let src = Path::new("../fixtures/landings.csv");
    if src.exists() {
        fs::copy(src, &dest).unwrap();
    } else {
        fs::write(
            &dest,
            "År,Art,Landingsplads,lat,lon,Levende vægt (kg),Landet vægt (kg),Værdi (kr)\n\
             2020,Torsk,Esbjerg,55.467,8.451,110,100,2500\n\
             2020,Torsk,Skagen,57.7209,10.5839,55,50,1300\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/landings.csv");
}
