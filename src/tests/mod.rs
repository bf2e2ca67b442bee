mod forward_tests;
