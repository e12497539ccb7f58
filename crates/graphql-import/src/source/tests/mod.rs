mod source_loader_tests;
