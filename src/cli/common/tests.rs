// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;

#[test]
fn test_parse_band() {
    let band = parse_band("700,1300,600").unwrap();
    assert_eq!(band, FreqBand::new(700.0, 1300.0, 600));

    let band = parse_band(" 1130.5 , 1430 ,300 ").unwrap();
    assert_abs_diff_eq!(band.min_mhz, 1130.5);
    assert_eq!(band.num_chans, 300);

    for bad in ["700,1300", "700,1300,600,1", "a,1300,600", "700,1300,6.5", ""] {
        assert!(
            matches!(parse_band(bad), Err(BandArgsError::BadBand(_))),
            "{bad}"
        );
    }
}

#[test]
fn test_parse_profile() {
    let args = BandArgs {
        profile: Some("wsrt".to_string()),
        bands: None,
    };
    assert_eq!(args.parse().unwrap(), FreqGrid::wsrt());

    let args = BandArgs {
        profile: Some("askap36".to_string()),
        bands: None,
    };
    assert_eq!(args.parse().unwrap().len(), 300);

    let args = BandArgs {
        profile: Some("VLA".to_string()),
        bands: None,
    };
    let err = args.parse().unwrap_err();
    assert!(matches!(err, BandArgsError::UnknownProfile(_)));
    assert!(err.to_string().contains("WSRT, ASKAP12, ASKAP36"), "{err}");
}

#[test]
fn test_default_grid() {
    let grid = BandArgs::default().parse().unwrap();
    assert_eq!(grid, FreqGrid::askap12());
}

#[test]
fn test_parse_bands() {
    let args = BandArgs {
        profile: None,
        bands: Some(vec!["700,1300,600".to_string(), "1500,1800,300".to_string()]),
    };
    assert_eq!(args.parse().unwrap(), FreqGrid::askap12());

    // The band parses, but isn't a valid band.
    let args = BandArgs {
        profile: None,
        bands: Some(vec!["700,1300,1".to_string()]),
    };
    assert!(matches!(
        args.parse(),
        Err(BandArgsError::Grid(FreqGridError::TooFewChannels { num_chans: 1 }))
    ));

    let args = BandArgs {
        profile: None,
        bands: Some(vec![]),
    };
    assert!(matches!(
        args.parse(),
        Err(BandArgsError::Grid(FreqGridError::NoBands))
    ));
}

#[test]
fn test_profile_and_bands() {
    let args = BandArgs {
        profile: Some("WSRT".to_string()),
        bands: Some(vec!["700,1300,600".to_string()]),
    };
    assert!(matches!(args.parse(), Err(BandArgsError::ProfileAndBands)));
}

#[test]
fn test_merge_prefers_the_first_grid() {
    let cli = BandArgs {
        profile: None,
        bands: Some(vec!["700,1300,600".to_string()]),
    };
    let file = BandArgs {
        profile: Some("WSRT".to_string()),
        bands: None,
    };
    assert_eq!(cli.clone().merge(file.clone()), cli);
    assert_eq!(BandArgs::default().merge(file.clone()), file);
    assert_eq!(BandArgs::default().merge(BandArgs::default()), BandArgs::default());
}

#[test]
fn test_split_triple() {
    assert_eq!(split_triple("1,2,3"), Some(("1", "2", "3")));
    assert_eq!(split_triple("1, -2 ,3"), Some(("1", "-2", "3")));
    assert_eq!(split_triple("1,2"), None);
    assert_eq!(split_triple("1,2,3,4"), None);
}
