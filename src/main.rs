use clap::Parser;
use env_logger::Env;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use random_geometry_points::{
    console::{show_intro, Args, PartialArgs},
    error::GeoResult,
    export::write_csv_file,
    PointJobDocument,
};

fn main() -> GeoResult<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    //parse CLI arguments
    let rgp_args = Args::try_from(PartialArgs::parse())?;
    show_intro();

    //read job document from file
    let document = PointJobDocument::from_file(&rgp_args.file_path)?;
    info!("job document {} loaded", rgp_args.file_path.display());

    //the seed given on the command line wins over the one of the document
    let mut rng = match rgp_args.seed.or_else(|| document.seed()) {
        Some(seed) => {
            info!("using random seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    //create points and write them out
    let results = document.run(&mut rng)?;
    write_csv_file(&rgp_args.output, &results)
}
