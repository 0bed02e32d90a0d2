mod lines_tests;
