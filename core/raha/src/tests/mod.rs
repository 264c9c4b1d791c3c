mod chat_tests;
