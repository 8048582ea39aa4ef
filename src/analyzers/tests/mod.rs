mod summarizer_tests;
