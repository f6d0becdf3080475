mod in_memory_document_repository_test;
