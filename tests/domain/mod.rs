mod clinical_section_test;
