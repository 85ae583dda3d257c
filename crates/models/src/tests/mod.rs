mod dto_tests;
