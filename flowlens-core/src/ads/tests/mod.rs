mod adsid_tests;
