mod bot_tests;
