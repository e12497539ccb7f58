mod definition_pool_tests;
